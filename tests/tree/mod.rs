mod print_commit_tree_against_explicit_parent;
mod print_commit_tree_with_unchanged_files;
mod print_flat_staging_changes;
mod print_nothing_for_clean_working_tree;
mod print_root_commit_as_all_added;
mod print_stash_tree_with_index_and_untracked_files;
mod print_staging_tree_with_folder_summaries;
mod report_deleted_files_in_nested_folders;
mod report_ignored_files_only_when_asked;
mod report_staged_and_unstaged_modifications;
mod reject_unknown_selections;
