mod budget;
mod dashboard;
mod login;
mod transactions;

pub use budget::BudgetPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use transactions::TransactionsPage;
