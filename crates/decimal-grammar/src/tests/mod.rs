
mod classify_good;
