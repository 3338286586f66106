mod dashboard;
pub use dashboard::Dashboard;

mod register;
pub use register::Register;
