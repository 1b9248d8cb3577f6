//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with owner and contributor snapshots.
    tasks (id) {
        /// Task identifier drawn from `tasks_id_seq`.
        id -> Int8,
        /// Task description.
        content -> Text,
        /// Activation flag.
        is_active -> Bool,
        /// Owning user as JSON.
        owner -> Nullable<Jsonb>,
        /// Contributor set as a JSON array, absent when never recorded.
        contributors -> Nullable<Jsonb>,
    }
}
