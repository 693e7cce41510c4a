mod helpers;

mod dispatch;
mod operations;
