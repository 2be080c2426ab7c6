mod trap;
