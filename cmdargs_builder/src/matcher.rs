mod model;

pub(crate) use self::model::*;
