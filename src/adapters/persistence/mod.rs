pub mod firestore;

pub use firestore::FirestorePersistence;
