use serde::{Deserialize, Serialize};

/// Ширина viewport превью. Влияет только на отображение, не на артефакт.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewDevice {
    #[default]
    Desktop,
    Mobile,
}

impl PreviewDevice {
    /// CSS width of the preview frame
    pub fn frame_width(&self) -> &'static str {
        match self {
            PreviewDevice::Desktop => "100%",
            PreviewDevice::Mobile => "375px",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PreviewDevice::Desktop => "Desktop View",
            PreviewDevice::Mobile => "Mobile View",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            PreviewDevice::Desktop => "monitor",
            PreviewDevice::Mobile => "smartphone",
        }
    }

    pub fn all() -> [PreviewDevice; 2] {
        [PreviewDevice::Desktop, PreviewDevice::Mobile]
    }
}
