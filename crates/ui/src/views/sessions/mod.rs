mod form;
mod view;

pub use form::SessionForm;
pub use view::SessionsView;
