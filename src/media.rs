//! Media classification for attached files: file-table `type` inference
//! and extension-based MIME lookup.

/// The `type` discriminator of the `file` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Thumbnail,
    Poster,
    Video,
    File,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Thumbnail => "thumbnail",
            MediaType::Poster => "poster",
            MediaType::Video => "video",
            MediaType::File => "file",
        }
    }

    /// Classify a filename from the multi-file column by its extension.
    /// Anything that is neither a known video nor a known image counts
    /// as a generic file.
    pub fn from_filename(name: &str) -> Self {
        match extension(name).as_deref() {
            Some("mp4" | "mov" | "webm") => MediaType::Video,
            Some("jpg" | "jpeg" | "png" | "gif") => MediaType::Thumbnail,
            _ => MediaType::File,
        }
    }
}

/// Lowercased extension of `name`, without the dot. `None` when the
/// filename has no extension.
fn extension(name: &str) -> Option<String> {
    let dot = name.rfind('.')?;
    let ext = &name[dot + 1..];
    if ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Guess a MIME type from the filename's extension. Unrecognized
/// extensions fall back to `application/octet-stream`.
pub fn guess_mime(name: &str) -> &'static str {
    let Some(ext) = extension(name) else {
        return "application/octet-stream";
    };
    match ext.as_str() {
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_filename() {
        assert_eq!(MediaType::from_filename("clip.mp4"), MediaType::Video);
        assert_eq!(MediaType::from_filename("clip.MOV"), MediaType::Video);
        assert_eq!(MediaType::from_filename("shot.jpg"), MediaType::Thumbnail);
        assert_eq!(MediaType::from_filename("shot.PNG"), MediaType::Thumbnail);
        assert_eq!(MediaType::from_filename("report.pdf"), MediaType::File);
        assert_eq!(MediaType::from_filename("noext"), MediaType::File);
    }

    #[test]
    fn test_guess_mime_known() {
        assert_eq!(guess_mime("a.mp4"), "video/mp4");
        assert_eq!(guess_mime("b.JPG"), "image/jpeg");
        assert_eq!(guess_mime("slides.pdf"), "application/pdf");
    }

    #[test]
    fn test_guess_mime_unknown_defaults() {
        assert_eq!(guess_mime("weird.hwp"), "application/octet-stream");
        assert_eq!(guess_mime("noext"), "application/octet-stream");
        assert_eq!(guess_mime("trailing."), "application/octet-stream");
    }
}
