mod blocks;
mod statements;
