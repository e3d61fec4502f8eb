//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    FetchRecords { source_url: String },
}
