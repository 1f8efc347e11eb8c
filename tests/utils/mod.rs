#![allow(dead_code)]

pub mod counting_seq;
pub mod time_provider;
