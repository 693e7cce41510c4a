mod credentials;
mod output_row;
