//! Per-language marketing copy.
//!
//! The page pre-renders one content block per language and toggles
//! visibility; nothing here is fetched or formatted at runtime. Keep the
//! entries aligned with the catalog in `lang.rs` — there is a test for it.

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub struct SiteCopy {
    pub lang: &'static str,
    pub nav_features: &'static str,
    pub nav_coupon: &'static str,
    pub hero_tagline: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub features_title: &'static str,
    pub features: [Feature; 3],
    pub coupon_title: &'static str,
    pub coupon_body: &'static str,
    pub coupon_button: &'static str,
    pub coupon_copied: &'static str,
    pub coupon_copy_failed: &'static str,
}

pub static SITE_COPY: [SiteCopy; 10] = [
    SiteCopy {
        lang: "en",
        nav_features: "Features",
        nav_coupon: "Offer",
        hero_tagline: "Notes that go where you go.",
        hero_subtitle: "Driftnote keeps your notes in sync across every device, even offline.",
        hero_cta: "Try it free",
        features_title: "Why Driftnote?",
        features: [
            Feature {
                icon: "✏️",
                title: "Write anywhere",
                body: "Works offline, syncs the moment you're back online.",
            },
            Feature {
                icon: "🔒",
                title: "Private by default",
                body: "End-to-end encryption for every note.",
            },
            Feature {
                icon: "⚡",
                title: "Instant search",
                body: "Full-text search in the blink of an eye.",
            },
        ],
        coupon_title: "Launch offer",
        coupon_body: "Use this code for 20% off your first year.",
        coupon_button: "Copy code",
        coupon_copied: "Coupon code copied",
        coupon_copy_failed: "Could not copy the code",
    },
    SiteCopy {
        lang: "vn",
        nav_features: "Tính năng",
        nav_coupon: "Ưu đãi",
        hero_tagline: "Ghi chú mọi lúc, mọi nơi.",
        hero_subtitle: "Driftnote đồng bộ ghi chú của bạn trên mọi thiết bị, kể cả khi ngoại tuyến.",
        hero_cta: "Dùng thử miễn phí",
        features_title: "Vì sao chọn Driftnote?",
        features: [
            Feature {
                icon: "✏️",
                title: "Viết ở bất cứ đâu",
                body: "Làm việc ngoại tuyến, đồng bộ ngay khi có mạng.",
            },
            Feature {
                icon: "🔒",
                title: "Riêng tư mặc định",
                body: "Mã hóa đầu cuối cho mọi ghi chú.",
            },
            Feature {
                icon: "⚡",
                title: "Tìm kiếm tức thì",
                body: "Tìm toàn văn trong nháy mắt.",
            },
        ],
        coupon_title: "Ưu đãi ra mắt",
        coupon_body: "Dùng mã này để được giảm 20% cho năm đầu tiên.",
        coupon_button: "Sao chép mã",
        coupon_copied: "Đã sao chép mã giảm giá",
        coupon_copy_failed: "Không thể sao chép mã",
    },
    SiteCopy {
        lang: "zh",
        nav_features: "功能",
        nav_coupon: "优惠",
        hero_tagline: "随时随地记录灵感。",
        hero_subtitle: "Driftnote 在所有设备间同步你的笔记,离线也能使用。",
        hero_cta: "免费试用",
        features_title: "为什么选择 Driftnote?",
        features: [
            Feature {
                icon: "✏️",
                title: "随处书写",
                body: "离线可用,联网自动同步。",
            },
            Feature {
                icon: "🔒",
                title: "默认私密",
                body: "所有笔记端到端加密。",
            },
            Feature {
                icon: "⚡",
                title: "即时搜索",
                body: "全文搜索,瞬间呈现。",
            },
        ],
        coupon_title: "上线特惠",
        coupon_body: "使用此优惠码,首年立减 20%。",
        coupon_button: "复制优惠码",
        coupon_copied: "优惠码已复制",
        coupon_copy_failed: "无法复制优惠码",
    },
    SiteCopy {
        lang: "th",
        nav_features: "ฟีเจอร์",
        nav_coupon: "โปรโมชั่น",
        hero_tagline: "จดบันทึกได้ทุกที่ทุกเวลา",
        hero_subtitle: "Driftnote ซิงค์โน้ตของคุณบนทุกอุปกรณ์ แม้ออฟไลน์",
        hero_cta: "ทดลองใช้ฟรี",
        features_title: "ทำไมต้อง Driftnote",
        features: [
            Feature {
                icon: "✏️",
                title: "เขียนได้ทุกที่",
                body: "ทำงานออฟไลน์ ซิงค์ทันทีเมื่อออนไลน์",
            },
            Feature {
                icon: "🔒",
                title: "เป็นส่วนตัวตั้งแต่ต้น",
                body: "เข้ารหัสแบบครบวงจรทุกโน้ต",
            },
            Feature {
                icon: "⚡",
                title: "ค้นหาทันใจ",
                body: "ค้นหาข้อความเต็มได้ในพริบตา",
            },
        ],
        coupon_title: "ข้อเสนอเปิดตัว",
        coupon_body: "ใช้โค้ดนี้รับส่วนลด 20% สำหรับปีแรก",
        coupon_button: "คัดลอกโค้ด",
        coupon_copied: "คัดลอกโค้ดแล้ว",
        coupon_copy_failed: "คัดลอกโค้ดไม่สำเร็จ",
    },
    SiteCopy {
        lang: "id",
        nav_features: "Fitur",
        nav_coupon: "Promo",
        hero_tagline: "Catat ide di mana saja.",
        hero_subtitle: "Driftnote menyinkronkan catatan Anda di semua perangkat, bahkan saat offline.",
        hero_cta: "Coba gratis",
        features_title: "Kenapa Driftnote?",
        features: [
            Feature {
                icon: "✏️",
                title: "Tulis di mana saja",
                body: "Bekerja offline, sinkron begitu online.",
            },
            Feature {
                icon: "🔒",
                title: "Privasi bawaan",
                body: "Enkripsi ujung-ke-ujung untuk semua catatan.",
            },
            Feature {
                icon: "⚡",
                title: "Pencarian instan",
                body: "Cari teks lengkap dalam sekejap.",
            },
        ],
        coupon_title: "Promo peluncuran",
        coupon_body: "Pakai kode ini untuk diskon 20% di tahun pertama.",
        coupon_button: "Salin kode",
        coupon_copied: "Kode kupon disalin",
        coupon_copy_failed: "Gagal menyalin kode",
    },
    SiteCopy {
        lang: "ru",
        nav_features: "Возможности",
        nav_coupon: "Акция",
        hero_tagline: "Заметки всегда под рукой.",
        hero_subtitle: "Driftnote синхронизирует заметки на всех устройствах, даже офлайн.",
        hero_cta: "Попробовать бесплатно",
        features_title: "Почему Driftnote?",
        features: [
            Feature {
                icon: "✏️",
                title: "Пишите где угодно",
                body: "Работает офлайн, синхронизируется при подключении.",
            },
            Feature {
                icon: "🔒",
                title: "Приватность по умолчанию",
                body: "Сквозное шифрование всех заметок.",
            },
            Feature {
                icon: "⚡",
                title: "Мгновенный поиск",
                body: "Полнотекстовый поиск за доли секунды.",
            },
        ],
        coupon_title: "Акция к запуску",
        coupon_body: "Введите этот код и получите скидку 20% на первый год.",
        coupon_button: "Скопировать код",
        coupon_copied: "Код скопирован",
        coupon_copy_failed: "Не удалось скопировать код",
    },
    SiteCopy {
        lang: "es",
        nav_features: "Funciones",
        nav_coupon: "Oferta",
        hero_tagline: "Toma notas donde sea.",
        hero_subtitle: "Driftnote sincroniza tus notas en todos tus dispositivos, incluso sin conexión.",
        hero_cta: "Prueba gratis",
        features_title: "¿Por qué Driftnote?",
        features: [
            Feature {
                icon: "✏️",
                title: "Escribe donde sea",
                body: "Funciona sin conexión y sincroniza al volver.",
            },
            Feature {
                icon: "🔒",
                title: "Privado por defecto",
                body: "Cifrado de extremo a extremo para todas tus notas.",
            },
            Feature {
                icon: "⚡",
                title: "Búsqueda instantánea",
                body: "Búsqueda de texto completo al instante.",
            },
        ],
        coupon_title: "Oferta de lanzamiento",
        coupon_body: "Usa este código y llévate un 20% de descuento el primer año.",
        coupon_button: "Copiar código",
        coupon_copied: "Código copiado",
        coupon_copy_failed: "No se pudo copiar el código",
    },
    SiteCopy {
        lang: "pt",
        nav_features: "Recursos",
        nav_coupon: "Oferta",
        hero_tagline: "Anote em qualquer lugar.",
        hero_subtitle: "O Driftnote sincroniza suas notas em todos os dispositivos, mesmo offline.",
        hero_cta: "Teste grátis",
        features_title: "Por que o Driftnote?",
        features: [
            Feature {
                icon: "✏️",
                title: "Escreva onde quiser",
                body: "Funciona offline e sincroniza ao reconectar.",
            },
            Feature {
                icon: "🔒",
                title: "Privado por padrão",
                body: "Criptografia de ponta a ponta em todas as notas.",
            },
            Feature {
                icon: "⚡",
                title: "Busca instantânea",
                body: "Busca em texto completo num piscar de olhos.",
            },
        ],
        coupon_title: "Oferta de lançamento",
        coupon_body: "Use este código e ganhe 20% de desconto no primeiro ano.",
        coupon_button: "Copiar código",
        coupon_copied: "Código copiado",
        coupon_copy_failed: "Não foi possível copiar o código",
    },
    SiteCopy {
        lang: "hi",
        nav_features: "विशेषताएँ",
        nav_coupon: "ऑफ़र",
        hero_tagline: "कहीं भी नोट लें।",
        hero_subtitle: "Driftnote आपके नोट्स को सभी डिवाइस पर सिंक करता है, ऑफ़लाइन भी।",
        hero_cta: "मुफ़्त आज़माएँ",
        features_title: "Driftnote ही क्यों?",
        features: [
            Feature {
                icon: "✏️",
                title: "कहीं भी लिखें",
                body: "ऑफ़लाइन काम करता है, ऑनलाइन होते ही सिंक।",
            },
            Feature {
                icon: "🔒",
                title: "डिफ़ॉल्ट रूप से निजी",
                body: "हर नोट के लिए एंड-टू-एंड एन्क्रिप्शन।",
            },
            Feature {
                icon: "⚡",
                title: "तुरंत खोज",
                body: "पूरे टेक्स्ट में पलक झपकते खोज।",
            },
        ],
        coupon_title: "लॉन्च ऑफ़र",
        coupon_body: "पहले साल 20% छूट के लिए यह कोड इस्तेमाल करें।",
        coupon_button: "कोड कॉपी करें",
        coupon_copied: "कूपन कोड कॉपी हो गया",
        coupon_copy_failed: "कोड कॉपी नहीं हो सका",
    },
    SiteCopy {
        lang: "ko",
        nav_features: "기능",
        nav_coupon: "할인",
        hero_tagline: "어디서든 메모하세요.",
        hero_subtitle: "Driftnote는 오프라인에서도 모든 기기에서 노트를 동기화합니다.",
        hero_cta: "무료로 시작하기",
        features_title: "왜 Driftnote일까요?",
        features: [
            Feature {
                icon: "✏️",
                title: "어디서나 작성",
                body: "오프라인에서도 동작하고 온라인이 되면 동기화됩니다.",
            },
            Feature {
                icon: "🔒",
                title: "기본으로 비공개",
                body: "모든 노트에 종단간 암호화를 적용합니다.",
            },
            Feature {
                icon: "⚡",
                title: "즉시 검색",
                body: "전체 텍스트 검색이 순식간에 끝납니다.",
            },
        ],
        coupon_title: "출시 기념 할인",
        coupon_body: "이 코드로 첫해 20% 할인을 받으세요.",
        coupon_button: "코드 복사",
        coupon_copied: "쿠폰 코드가 복사되었습니다",
        coupon_copy_failed: "코드를 복사하지 못했습니다",
    },
];

/// Copy for a language key, falling back to English for anything unknown.
pub fn copy_for(key: &str) -> &'static SiteCopy {
    SITE_COPY
        .iter()
        .find(|copy| copy.lang == key)
        .unwrap_or(&SITE_COPY[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::LanguageCatalog;

    #[test]
    fn every_catalog_language_has_copy() {
        let catalog = LanguageCatalog::site_default();
        for lang in catalog.languages() {
            assert!(
                SITE_COPY.iter().any(|copy| copy.lang == lang.key),
                "missing copy for {}",
                lang.key
            );
        }
    }

    #[test]
    fn copy_for_falls_back_to_english() {
        assert_eq!(copy_for("klingon").lang, "en");
        assert_eq!(copy_for("vn").lang, "vn");
    }
}
