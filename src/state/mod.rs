// Estado reactivo compartido (Rc<RefCell>)

pub mod reactivity;

pub use reactivity::ReactiveState;
