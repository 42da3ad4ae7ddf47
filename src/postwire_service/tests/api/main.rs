mod helpers;
mod send_email;
