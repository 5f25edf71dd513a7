// Domain layer: the element record and its attribute values.

pub mod model;
