//! Path string rewriting between Windows and POSIX conventions
//!
//! These are pure string transforms. Nothing here touches the filesystem or
//! checks that the result is a valid path on the target system.

use crate::OperatingSystem;

/// Separator used by the given operating system.
pub fn path_separator(os: OperatingSystem) -> &'static str {
    match os {
        OperatingSystem::Windows => "\\",
        OperatingSystem::Linux | OperatingSystem::Mac | OperatingSystem::Unknown => "/",
    }
}

/// Rewrite a path string for the given operating system.
///
/// - Windows: every `/` becomes `\`.
/// - Linux and Mac: a drive prefix (everything up to and including the first
///   `:`) is dropped, then every `\` becomes `/`.
/// - Unknown: the path is returned unchanged.
pub fn to_host_path(path: &str, os: OperatingSystem) -> String {
    match os {
        OperatingSystem::Windows => path.replace('/', "\\"),
        OperatingSystem::Linux | OperatingSystem::Mac => {
            let without_drive = match path.split_once(':') {
                Some((_, rest)) => rest,
                None => path,
            };
            without_drive.replace('\\', "/")
        }
        OperatingSystem::Unknown => path.to_string(),
    }
}

/// Join path parts with the separator of the given operating system.
///
/// Every `/` and `\` is removed from each part before joining, not only the
/// leading and trailing ones, so `"a/b"` contributes the single segment `"ab"`.
pub fn join_path<S: AsRef<str>>(parts: &[S], os: OperatingSystem) -> String {
    parts
        .iter()
        .map(|part| part.as_ref().replace(['/', '\\'], ""))
        .collect::<Vec<_>>()
        .join(path_separator(os))
}

/// Program path as it was invoked, or an empty string when unavailable.
pub fn execution_path() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default()
}
