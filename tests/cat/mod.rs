mod print_commit_file_contents;
mod print_staged_and_working_contents;
mod print_stash_file_contents;
