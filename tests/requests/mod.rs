mod describe_commit_requests;
mod describe_staging_requests;
