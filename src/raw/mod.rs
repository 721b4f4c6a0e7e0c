mod raw_array_map;

pub(crate) use raw_array_map::RawArrayMap;
