use super::config::{CANDIDATE_SUFFIXES, TEST_MARKERS};

/// File name with its extension and any `.spec` / `.test` marker removed.
///
/// `/project/src/foo.spec.js`, `/project/src/foo.test.js` and
/// `/project/src/foo.js` all share the base name `foo`.
pub fn base_name(path: &str) -> &str {
    let file_name = file_name(path);
    let ext = extension(file_name);
    if ext.is_empty() {
        return file_name;
    }

    for marker in TEST_MARKERS {
        let marked = format!("{marker}{ext}");
        if let Some(stripped) = file_name.strip_suffix(marked.as_str()) {
            return stripped;
        }
    }

    file_name.strip_suffix(ext).unwrap_or(file_name)
}

/// Every file name the index is asked for when looking up `name`.
pub fn candidate_file_names(name: &str) -> Vec<String> {
    CANDIDATE_SUFFIXES
        .iter()
        .map(|suffix| format!("{name}{suffix}"))
        .collect()
}

pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) if index > 0 => &file_name[index..],
        _ => "",
    }
}
