mod fake_camera;
mod format;
mod timing;
