#[derive(Debug, Clone)]
pub enum Message {
    // === CRUD MESSAGES ===
    RecordInserted(String, String),     // label, id
    RecordInsertFailed(String, String), // label, store error
    RecordUpdated(String, String),      // label, id
    RecordUpdateFailed(String, String), // label, id
    RecordDeleted(String, String),      // label, id
    RecordDeleteFailed(String, String), // label, id
    NoRecordsFound(String),             // plural label
    ListFailed(String, String),         // plural label, store error
    ListHeader(String),                 // plural label

    // === EXPORT MESSAGES ===
    ExportStarted(String),     // plural label
    ExportNothingToDo(String), // plural label
    ExportReadFailed(String),  // store error
    ExportWriteFailed(String), // io error
    ExportCompleted(String),   // file name
    ExportFailed,

    // === SERVER MESSAGES ===
    ServerStarted(String), // bind address

    // === CONFIGURATION MESSAGES ===
    DatabaseNotConfigured,

    // === MENU MESSAGES ===
    Goodbye,
}
