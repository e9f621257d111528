pub mod paginate_opts;

pub use crate::opts::paginate_opts::PaginateOpts;
