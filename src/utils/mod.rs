pub(crate) mod date;
pub(crate) mod debug;
pub(crate) mod jq;
pub(crate) mod timezone;
pub(crate) mod url;

pub(crate) use date::format_date;
pub(crate) use debug::{debug_enabled, set_debug};
pub(crate) use jq::emit_json;
pub(crate) use timezone::Timezone;
pub(crate) use url::{decode_path_segment, encode_path_segment, is_absolute_url};
