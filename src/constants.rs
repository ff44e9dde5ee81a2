/// DOM bindings and presentation timings for the panel page.
///
/// Element ids match the markup the host resource ships with the page.
pub const ID_URL: &str = "url";
pub const ID_LOOP: &str = "loop";
pub const ID_PLAY: &str = "play";
pub const ID_STOP: &str = "stop";
pub const ID_CLOSE: &str = "close";
pub const ID_VOLUME: &str = "volume";
pub const ID_VOLUME_READOUT: &str = "volv";
pub const ID_RADIUS: &str = "radius";
pub const ID_RADIUS_READOUT: &str = "radv";
pub const ID_AUDIO: &str = "audio";

// Resource name used when the host does not expose GetParentResourceName
pub const DEFAULT_RESOURCE: &str = "dj_plus";
pub const RESOURCE_NAME_GLOBAL: &str = "GetParentResourceName";

pub const NOTIFY_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

// Toast lifecycle (milliseconds after creation)
pub const TOAST_CLASS: &str = "toast";
pub const TOAST_SHOW_CLASS: &str = "show";
pub const TOAST_SHOW_AFTER_MS: i32 = 10;
pub const TOAST_HIDE_AFTER_MS: i32 = 2200;
pub const TOAST_REMOVE_AFTER_MS: i32 = 2800;
