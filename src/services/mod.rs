//! Service layer for the expense tracker
//!
//! The service layer holds the expense store, the derived views it computes
//! and the contract it uses to drive a render surface.

pub mod store;
pub mod summary;
pub mod surface;

pub use store::{AddOutcome, ExpenseStore};
pub use summary::{per_date_totals, remaining, total_spent, DateTotal};
pub use surface::{LedgerView, Notice, NoticeKind, RecordingSurface, RenderSurface};
