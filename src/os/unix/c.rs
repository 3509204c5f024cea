// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason

pub use libc::{dlclose, dlopen, dlsym, RTLD_LOCAL, RTLD_NOW};
