pub mod category_service;
pub mod report_service;
pub mod snapshot_service;
pub mod stock_service;
