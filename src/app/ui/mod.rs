mod entities;
mod panels;
