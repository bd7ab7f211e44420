// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_entry() -> Option<String> {
    Some("index.js".to_string())
}

pub(crate) fn default_js_output() -> String {
    "[target-name].js".to_string()
}

pub(crate) fn default_css_output() -> String {
    "statics/styles/[target-name].css".to_string()
}

pub(crate) fn default_fonts_output() -> String {
    "statics/fonts/[name].[ext]".to_string()
}

pub(crate) fn default_images_output() -> String {
    "statics/images/[name].[ext]".to_string()
}

pub(crate) fn default_library_target() -> String {
    "commonjs2".to_string()
}

pub(crate) fn default_dev_server_port() -> u16 {
    2509
}

pub(crate) fn default_dev_server_host() -> String {
    "localhost".to_string()
}

pub(crate) fn default_inspect_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_inspect_port() -> u16 {
    9229
}

pub(crate) fn default_inspect_command() -> String {
    "inspect".to_string()
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}

pub(crate) fn default_define_on() -> String {
    "process.env.CONFIG".to_string()
}

pub(crate) fn default_configuration_path() -> String {
    "config/".to_string()
}

pub(crate) fn default_configuration_env_var() -> String {
    "CONFIG".to_string()
}

pub(crate) fn default_browser_versions() -> u32 {
    2
}

pub(crate) fn default_dot_env_files() -> Vec<String> {
    vec![
        ".env.[target-name].[build-type]".to_string(),
        ".env.[target-name]".to_string(),
        ".env.[build-type]".to_string(),
        ".env".to_string(),
    ]
}
