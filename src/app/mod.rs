pub mod dashboard_use_case;

pub use dashboard_use_case::DashboardUseCase;
