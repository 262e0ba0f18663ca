pub mod looping;
pub mod settings;
pub mod unwinding;
// Lock acquisition stays an implementation detail of the manager.
pub(crate) mod lock;

pub use looping::LoopingEngine;
pub use settings::StrategySettings;
pub use unwinding::UnwindingEngine;
