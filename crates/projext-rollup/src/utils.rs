//! Path and naming helpers shared by the builders.
//!
//! Rollup options are plain forward-slash strings, so these work on `&str`
//! rather than `Path` to keep the output identical across platforms.

/// Convert a kebab-case name to camelCase: every `-x` becomes `X`.
///
/// Only word characters (`[A-Za-z0-9_]`) after a dash are folded, any other
/// dash is kept as is.
///
/// ```
/// use projext_rollup::utils::camel_case;
///
/// assert_eq!(camel_case("my-app"), "myApp");
/// assert_eq!(camel_case("react-dom-server"), "reactDomServer");
/// assert_eq!(camel_case("trailing-"), "trailing-");
/// ```
pub fn camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    result.extend(next.to_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }
    result
}

/// Insert a `[name]` placeholder before the extension of a file path.
///
/// ```
/// use projext_rollup::utils::chunk_template;
///
/// assert_eq!(chunk_template("out/bundle.js"), "out/bundle.[name].js");
/// assert_eq!(chunk_template("bundle"), "bundle.[name]");
/// ```
pub fn chunk_template(js: &str) -> String {
    let (dir, file) = match js.rfind('/') {
        Some(index) => (&js[..=index], &js[index + 1..]),
        None => ("", js),
    };

    match file.rfind('.') {
        Some(dot) if dot > 0 => format!("{dir}{}.[name]{}", &file[..dot], &file[dot..]),
        _ => format!("{dir}{file}.[name]"),
    }
}

/// Path relative to the project root for a file inside the build folder.
///
/// The result always starts with `./`.
pub fn build_relative(build: &str, path: &str) -> String {
    let build = build.trim_start_matches("./").trim_end_matches('/');
    let path = path.trim_start_matches("./").trim_start_matches('/');
    if build.is_empty() {
        format!("./{path}")
    } else {
        format!("./{build}/{path}")
    }
}

/// Join two forward-slash path segments.
pub fn join_path(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches("./");
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{base}/{path}")
    }
}

/// Last segment of a forward-slash path.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Everything before the last segment of a forward-slash path.
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(index) => &path[..index],
        None => ".",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_folds_every_dash() {
        assert_eq!(camel_case("app"), "app");
        assert_eq!(camel_case("my-cool-lib"), "myCoolLib");
        assert_eq!(camel_case("my--lib"), "my-Lib");
        assert_eq!(camel_case("lib-2"), "lib2");
        assert_eq!(camel_case("a-_b"), "a_b");
    }

    #[test]
    fn chunk_template_keeps_directories() {
        assert_eq!(
            chunk_template("statics/js/app.123.js"),
            "statics/js/app.123.[name].js"
        );
        assert_eq!(chunk_template(".hidden"), ".hidden.[name]");
    }

    #[test]
    fn build_relative_normalizes_slashes() {
        assert_eq!(build_relative("dist", "app.js"), "./dist/app.js");
        assert_eq!(build_relative("./dist/", "/app.js"), "./dist/app.js");
        assert_eq!(build_relative("", "app.js"), "./app.js");
    }

    #[test]
    fn join_path_skips_empty_base() {
        assert_eq!(join_path("src/app", "index.js"), "src/app/index.js");
        assert_eq!(join_path("src/app/", "./index.js"), "src/app/index.js");
        assert_eq!(join_path("", "index.js"), "index.js");
    }

    #[test]
    fn basename_and_dirname() {
        assert_eq!(basename("./dist/js/app.js"), "app.js");
        assert_eq!(basename("app.js"), "app.js");
        assert_eq!(dirname("./dist/js/app.js"), "./dist/js");
        assert_eq!(dirname("/app.js"), "/");
        assert_eq!(dirname("app.js"), ".");
    }
}
