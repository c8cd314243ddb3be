mod nested_nav;

pub use self::nested_nav::*;
