pub mod aws_rss;
