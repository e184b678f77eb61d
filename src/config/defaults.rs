use crate::research::ResultMode;

pub fn default_version() -> u32 {
    1
}

pub fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

pub fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

pub fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

pub fn default_timeout_sec() -> u64 {
    120
}

pub fn default_excluded_domains() -> Vec<String> {
    vec!["wikipedia".to_string()]
}

pub fn default_mode() -> ResultMode {
    ResultMode::SourcesOnly
}
