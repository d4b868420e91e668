mod allocate;
mod utils;
