pub mod course;
pub mod view;

pub use course::{Brand, Course, Partner};
pub use view::{CourseDetail, CourseView, ModuleGroup, SubjectItem, TestimonialEntry};

use serde::{Deserialize, Deserializer};

/// GraphQL sends `null` for unset columns; read those as the type's zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
