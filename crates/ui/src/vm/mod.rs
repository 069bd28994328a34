mod gradient;
mod progress_vm;
mod session_vm;
mod time_fmt;

pub use gradient::color_from_gradient;
pub use progress_vm::{ProgressChipVm, ProgressVm, map_progress};
pub use session_vm::{SessionRowVm, map_session_rows};
pub use time_fmt::{format_finish_time, format_length};
