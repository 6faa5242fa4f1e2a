mod helper;
mod refresher;
