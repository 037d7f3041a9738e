//! Database entity models

pub mod expert;

pub use expert::{
    ActiveModel as ExpertActiveModel, Column as ExpertColumn, Entity as ExpertEntity,
    Model as Expert,
};
