/// Status returned by `main`, from `RAWSTART_STATUS`.
const STATUS: i32 = -1;
