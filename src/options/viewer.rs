use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// CV viewer document and embedding parameters.
pub struct ViewerOptions {
    /// Relative path of the PDF shown in the modal.
    pub document_url: String,
    /// Fragment parameters passed to the browser's PDF viewer.
    pub viewer_params: String,
    /// Source assigned on close to stop rendering.
    pub blank_source: String,
}

impl ViewerOptions {
    /// Full iframe source: document URL plus viewer fragment.
    #[must_use]
    pub fn source(&self) -> String {
        if self.viewer_params.is_empty() {
            self.document_url.clone()
        } else {
            format!("{}#{}", self.document_url, self.viewer_params)
        }
    }
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            document_url: "assets/cv/DoCongMinh.pdf".into(),
            viewer_params: "toolbar=0&navpanes=0&scrollbar=1".into(),
            blank_source: "about:blank".into(),
        }
    }
}
