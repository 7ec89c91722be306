//! Plan selection, checkout, and confirmation handlers.

mod confirm_plan;
mod select_plan;
mod view_checkout;

pub use confirm_plan::{ConfirmPlanCommand, ConfirmPlanHandler, ConfirmPlanResult};
pub use select_plan::{SelectPlanCommand, SelectPlanHandler, SelectPlanResult};
pub use view_checkout::{CheckoutView, ViewCheckoutHandler, ViewCheckoutQuery};
