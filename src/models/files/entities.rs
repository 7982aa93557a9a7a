use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 文件引用
///
/// 文件本体由外部上传服务保管，这里只保存其返回的元数据。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct FileRef {
    pub url: String,
    pub filename: Option<String>,
    pub size_bytes: Option<i64>,
    pub mime_type: Option<String>,
}

impl FileRef {
    /// URL 必须非空且为 http(s) 链接
    pub fn is_valid(&self) -> bool {
        self.url.starts_with("http://") || self.url.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_ref_url_scheme() {
        let ok = FileRef {
            url: "https://storage.example.com/f/abc.pdf".to_string(),
            filename: Some("laporan.pdf".to_string()),
            size_bytes: Some(10240),
            mime_type: Some("application/pdf".to_string()),
        };
        assert!(ok.is_valid());

        let bad = FileRef {
            url: "ftp://storage.example.com/f/abc.pdf".to_string(),
            filename: None,
            size_bytes: None,
            mime_type: None,
        };
        assert!(!bad.is_valid());
    }
}
