#[derive(Debug, Clone)]
pub enum Message {
    // === SCHEMA MESSAGES ===
    SchemaUpToDate,
    SchemaTableCreated(String),
    TaxonomySeeded(usize),

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskFinished(String),
    TasksDeletedCount(usize),
    TaskNotFoundWithId(i64),
    NoTasksFound,
    NoTaskIdsProvided,
    ConfirmDeleteTasks(usize),
    TaskRejected,
    CategoryNotFound(String),
    ActivityNotFound(String),
    ValidationIssue(String, String), // field, problem
    EditStartedInPast(i64),          // task id

    // === REMINDER MESSAGES ===
    ReminderScheduled(String),            // reminder id
    ReminderScheduleFailed(String, String), // reminder id, cause
    ReminderCancelFailed(String, String),   // reminder id, cause
    ReminderListFailed(String),             // cause
    RemindersSwept(usize, String),          // count, prefix

    // === PREFERENCE MESSAGES ===
    PrefDefaultsSeeded,
    NotificationsEnabled(String),  // "start" or "end"
    NotificationsDisabled(String), // "start" or "end"

    // === INIT MESSAGES ===
    StorageInitialized,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
