mod builders;

pub use builders::TypedRecordBuilder;
