//! Custom widget components

mod camera;
mod device_details;
mod device_list;
mod header;
mod register_form;
mod status_bar;

pub use camera::{spinner_frame, CameraPanel, SPINNER};
pub use device_details::DeviceDetails;
pub use device_list::{DeviceList, TIP};
pub use header::MainHeader;
pub use register_form::RegisterFormView;
pub use status_bar::StatusBar;
