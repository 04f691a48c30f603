pub mod costbasis_service;
pub mod journal_service;
pub mod ledger_service;
pub mod review_queue_service;
