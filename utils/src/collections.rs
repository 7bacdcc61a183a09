mod indexed_list;

pub use self::indexed_list::*;
