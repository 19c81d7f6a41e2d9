mod properties;
mod scenarios;
mod util;
