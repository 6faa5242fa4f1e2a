mod helper;
mod refresh;
mod services;
mod test_client;
