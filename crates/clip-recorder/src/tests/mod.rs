mod config;
mod input_handler;
mod screen;
