//! Google 翻译支持的语言表（名称 → 代码），以及供节点参数使用的可选项

use std::collections::BTreeSet;

use super::{AUTO_LANG, NONE_LANG};

pub const GOOGLE_LANGUAGES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("amharic", "am"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("assamese", "as"),
    ("aymara", "ay"),
    ("azerbaijani", "az"),
    ("bambara", "bm"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bhojpuri", "bho"),
    ("bosnian", "bs"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("cebuano", "ceb"),
    ("chichewa", "ny"),
    ("chinese (simplified)", "zh-CN"),
    ("chinese (traditional)", "zh-TW"),
    ("corsican", "co"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dhivehi", "dv"),
    ("dogri", "doi"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("ewe", "ee"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("frisian", "fy"),
    ("galician", "gl"),
    ("georgian", "ka"),
    ("german", "de"),
    ("greek", "el"),
    ("guarani", "gn"),
    ("gujarati", "gu"),
    ("haitian creole", "ht"),
    ("hausa", "ha"),
    ("hawaiian", "haw"),
    ("hebrew", "iw"),
    ("hindi", "hi"),
    ("hmong", "hmn"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("igbo", "ig"),
    ("ilocano", "ilo"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("javanese", "jw"),
    ("kannada", "kn"),
    ("kazakh", "kk"),
    ("khmer", "km"),
    ("kinyarwanda", "rw"),
    ("konkani", "gom"),
    ("korean", "ko"),
    ("krio", "kri"),
    ("kurdish (kurmanji)", "ku"),
    ("kurdish (sorani)", "ckb"),
    ("kyrgyz", "ky"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lingala", "ln"),
    ("lithuanian", "lt"),
    ("luganda", "lg"),
    ("luxembourgish", "lb"),
    ("macedonian", "mk"),
    ("maithili", "mai"),
    ("malagasy", "mg"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("maltese", "mt"),
    ("maori", "mi"),
    ("marathi", "mr"),
    ("meiteilon (manipuri)", "mni-Mtei"),
    ("mizo", "lus"),
    ("mongolian", "mn"),
    ("myanmar", "my"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("odia (oriya)", "or"),
    ("oromo", "om"),
    ("pashto", "ps"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("quechua", "qu"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("samoan", "sm"),
    ("sanskrit", "sa"),
    ("scots gaelic", "gd"),
    ("sepedi", "nso"),
    ("serbian", "sr"),
    ("sesotho", "st"),
    ("shona", "sn"),
    ("sindhi", "sd"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("somali", "so"),
    ("spanish", "es"),
    ("sundanese", "su"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tajik", "tg"),
    ("tamil", "ta"),
    ("tatar", "tt"),
    ("telugu", "te"),
    ("thai", "th"),
    ("tigrinya", "ti"),
    ("tsonga", "ts"),
    ("turkish", "tr"),
    ("turkmen", "tk"),
    ("twi", "ak"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("uyghur", "ug"),
    ("uzbek", "uz"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("xhosa", "xh"),
    ("yiddish", "yi"),
    ("yoruba", "yo"),
    ("zulu", "zu"),
];

/// 全部支持的语言代码
pub fn supported_languages() -> BTreeSet<&'static str> {
    GOOGLE_LANGUAGES.iter().map(|(_, code)| *code).collect()
}

/// 接受语言代码或英文名称（不区分大小写），返回规范代码
pub fn resolve_language(code_or_name: &str) -> Option<&'static str> {
    let wanted = code_or_name.trim();
    GOOGLE_LANGUAGES
        .iter()
        .find(|(name, code)| code.eq_ignore_ascii_case(wanted) || name.eq_ignore_ascii_case(wanted))
        .map(|(_, code)| *code)
}

/// 源语言可选项：`auto` 在首位
pub fn source_language_options() -> Vec<String> {
    std::iter::once(AUTO_LANG.to_string())
        .chain(supported_languages().into_iter().map(str::to_string))
        .collect()
}

/// 目标语言可选项：`none` 在末位
pub fn target_language_options() -> Vec<String> {
    supported_languages()
        .into_iter()
        .map(str::to_string)
        .chain(std::iter::once(NONE_LANG.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        assert_eq!(supported_languages().len(), GOOGLE_LANGUAGES.len());
    }

    #[test]
    fn test_resolve_by_code_or_name() {
        assert_eq!(resolve_language("fr"), Some("fr"));
        assert_eq!(resolve_language("French"), Some("fr"));
        assert_eq!(resolve_language("zh-cn"), Some("zh-CN"));
        assert_eq!(resolve_language("chinese (traditional)"), Some("zh-TW"));
        assert_eq!(resolve_language("klingon"), None);
        assert_eq!(resolve_language("auto"), None);
    }

    #[test]
    fn test_options_layout() {
        let sources = source_language_options();
        assert_eq!(sources.first().map(String::as_str), Some("auto"));
        assert!(sources.iter().any(|c| c == "en"));
        assert!(!sources.iter().any(|c| c == "none"));

        let targets = target_language_options();
        assert_eq!(targets.last().map(String::as_str), Some("none"));
        assert!(targets.iter().any(|c| c == "en"));
        assert!(!targets.iter().any(|c| c == "auto"));
    }
}
