pub mod app_status;
pub mod preview_device;

pub use app_status::AppStatus;
pub use preview_device::PreviewDevice;
